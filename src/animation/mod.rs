pub(crate) mod ease;
pub(crate) mod easing;
pub(crate) mod interpolate;
pub(crate) mod lerp;
pub(crate) mod oscillate;
pub(crate) mod spring;
