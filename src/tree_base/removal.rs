use bitmask_enum::bitmask;

#[bitmask(u8)]
pub enum RemovalFlags {
    NotFound = 1,
    // The matched node had at most one child and was spliced out.
    Splice = 2,
    // The matched node had two children and took its successor's element.
    Successor = 4,
    // The root slot was rewritten.
    Root = 8,
}

pub struct RemovalResult<T> {
    pub flags: RemovalFlags,
    pub value: Option<T>,
}

impl<T> RemovalResult<T> {
    pub fn not_found() -> Self {
        Self {
            flags: RemovalFlags::NotFound,
            value: None,
        }
    }

    pub fn new_with_value(flags: RemovalFlags, value: T) -> Self {
        Self {
            flags,
            value: Some(value),
        }
    }

    pub fn has(&self, flag: RemovalFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn found(&self) -> bool {
        !self.has(RemovalFlags::NotFound)
    }
}
