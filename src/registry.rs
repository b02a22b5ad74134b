//! Handles and index-linked membership lists.
//!
//! Buttons live in one arena inside the manager. Membership (free-standing
//! registry or a group's member list) is expressed by a [`Link`] stored inside
//! each button record: the owning list tag plus previous/next arena indices.
//! Linking appends at the tail and unlinking splices a node out, both O(1),
//! without any allocation.

/// Handle to a button created by a manager.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId(usize);

impl ButtonId {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self { Self(index) }

    /// Arena slot of the button.
    #[inline]
    pub const fn index(self) -> usize { self.0 }
}

/// Handle to a group registered with a manager.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GroupId(usize);

impl GroupId {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self { Self(index) }

    /// Arena slot of the group.
    #[inline]
    pub const fn index(self) -> usize { self.0 }
}

/// List currently holding a button.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub(crate) enum Owner {
    /// Created but not registered anywhere; never processed.
    #[default]
    Unlinked,
    /// Free-standing button registry.
    Standalone,
    /// Member list of a group.
    Group(GroupId),
}

/// Per-button list node.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Link {
    owner: Owner,
    prev: Option<ButtonId>,
    next: Option<ButtonId>,
}

impl Link {
    #[inline]
    pub(crate) const fn owner(&self) -> Owner { self.owner }

    #[inline]
    pub(crate) const fn next(&self) -> Option<ButtonId> { self.next }
}

/// Arena element carrying a [`Link`].
pub(crate) trait Linked {
    fn link(&self) -> &Link;
    fn link_mut(&mut self) -> &mut Link;
}

/// Head/tail of one membership list over the button arena.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct List {
    head: Option<ButtonId>,
    tail: Option<ButtonId>,
    len: usize,
}

impl List {
    pub(crate) const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub(crate) const fn head(&self) -> Option<ButtonId> { self.head }

    #[inline]
    pub(crate) const fn len(&self) -> usize { self.len }

    /// Append `id` at the tail and tag it with `owner`.
    ///
    /// The node must be unlinked.
    pub(crate) fn push_back<T: Linked>(
        &mut self,
        nodes: &mut [T],
        id: ButtonId,
        owner: Owner,
    ) {
        debug_assert_eq!(nodes[id.index()].link().owner, Owner::Unlinked);

        if let Some(tail) = self.tail {
            nodes[tail.index()].link_mut().next = Some(id);
        } else {
            self.head = Some(id);
        }

        *nodes[id.index()].link_mut() = Link {
            owner,
            prev: self.tail,
            next: None,
        };
        self.tail = Some(id);
        self.len += 1;
    }

    /// Splice `id` out of this list and mark it unlinked.
    ///
    /// The node must belong to this list.
    pub(crate) fn unlink<T: Linked>(
        &mut self,
        nodes: &mut [T],
        id: ButtonId,
    ) {
        let Link { prev, next, .. } = *nodes[id.index()].link();

        match prev {
            Some(prev) => nodes[prev.index()].link_mut().next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => nodes[next.index()].link_mut().prev = prev,
            None => self.tail = prev,
        }

        *nodes[id.index()].link_mut() = Link::default();
        self.len -= 1;
    }

    /// Iterate member handles from head to tail.
    pub(crate) fn iter<'a, T: Linked>(
        &self,
        nodes: &'a [T],
    ) -> ListIter<'a, T> {
        ListIter {
            nodes,
            cursor: self.head,
        }
    }
}

/// Iterator over the handles of a [`List`].
pub(crate) struct ListIter<'a, T> {
    nodes: &'a [T],
    cursor: Option<ButtonId>,
}

impl<T: Linked> Iterator for ListIter<'_, T> {
    type Item = ButtonId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.nodes[id.index()].link().next;
        Some(id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
