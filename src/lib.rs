#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_alias as alias;
pub use vc_enforce as enforce;
pub use vc_ptr as ptr;
