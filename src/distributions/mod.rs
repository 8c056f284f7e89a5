// Circular distributions. All of them implement [crate::distribution_trait::Distribution].

pub mod CircularUniform;
pub mod VonMises;
