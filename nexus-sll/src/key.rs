//! Key trait for node links.
//!
//! A [`Key`] names a node in storage. Links between nodes are plain keys,
//! with a reserved sentinel ([`Key::NONE`]) standing in for "no successor"
//! so that a node carries one word of link state instead of an `Option`.

/// A copyable storage key with a sentinel "none" value.
///
/// # Example
///
/// ```
/// use nexus_sll::Key;
///
/// let key: usize = 7;
/// assert!(key.is_some());
/// assert!(usize::NONE.is_none());
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel value representing "no node".
    ///
    /// Marks the end of the chain (`next` of the tail) and the head/tail of
    /// an empty list.
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Converts to `Option`, mapping the sentinel to `None`.
    #[inline]
    fn into_option(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

// `slab::Slab` hands out `usize` keys.
impl Key for usize {
    const NONE: Self = usize::MAX;
}
