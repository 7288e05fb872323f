// @generated
// This file wires up buf-generated protobuf code
// Note: The prost files already include!() the tonic files automatically

pub mod catalog {
    include!("catalog.rs");
    // catalog.tonic.rs is auto-included by catalog.rs
}
