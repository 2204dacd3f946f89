//! Sous-commandes de la CLI

pub mod decode;
pub mod encode;
pub mod inspect;
