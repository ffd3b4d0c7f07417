pub(crate) mod adjuster;
