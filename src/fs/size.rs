//! Byte-count formatting for tree labels.
//!
//! Units are binary and chosen by strict greater-than, so a value sitting
//! exactly on a threshold is still shown in the smaller unit.

use super::tree::Node;

pub const KIB: u64 = 1 << 10;
pub const MIB: u64 = 1 << 20;
pub const GIB: u64 = 1 << 30;

/// Split a byte count into a truncated magnitude and its unit.
pub fn magnitude(bytes: u64) -> (u64, &'static str) {
    if bytes > GIB {
        (bytes / GIB, "GiB")
    } else if bytes > MIB {
        (bytes / MIB, "MiB")
    } else if bytes > KIB {
        (bytes / KIB, "KiB")
    } else {
        (bytes, "B")
    }
}

/// Render a byte count as a right-aligned `"%3d %3s"` pair.
pub fn format_size(bytes: u64) -> String {
    let (n, unit) = magnitude(bytes);
    format!("{n:>3} {unit:>3}")
}

/// The text shown for a node: size column followed by the full path.
pub fn label(node: &Node) -> String {
    format!("{} {}", format_size(node.size()), node.path.display())
}
