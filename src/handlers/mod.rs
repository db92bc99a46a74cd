//! HTTP handlers, one per resource/action: validate, persist, load relations,
//! serialize.

pub mod category;
pub mod contact;
pub mod customer;
