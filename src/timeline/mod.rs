pub(crate) mod band;
pub(crate) mod motion;
pub(crate) mod resolve;
pub(crate) mod section;
pub(crate) mod sequence;
pub(crate) mod table;
