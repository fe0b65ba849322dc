pub mod entropy;
pub mod fingerprint;
pub mod sampler;
pub mod split;
pub mod trial;
