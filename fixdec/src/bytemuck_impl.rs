use crate::{Decimal, Rate};
use bytemuck::{Pod, Zeroable};

// Both types are repr(transparent) wrappers over primitive integers.

unsafe impl Zeroable for Decimal {}

unsafe impl Pod for Decimal {}

unsafe impl Zeroable for Rate {}

unsafe impl Pod for Rate {}
