use crate::{FaceDescriptor, Identity};

/// One enrolled face: the owning identity and its stored descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrolledDescriptor {
    pub identity: Identity,
    pub descriptor: FaceDescriptor,
}
