use crate::spatial::node::NodeId;

/// Reasons a structural mutation of the `SceneGraph` was rejected. A rejected
/// mutation never leaves partial state behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Fail)]
pub enum Error {
    #[fail(display = "{} is not alive.", _0)]
    NodeNotFound(NodeId),
    #[fail(display = "Can not attach {} under {}, it would be its own ancestor.", _0, _1)]
    CyclicHierarchy(NodeId, NodeId),
    #[fail(display = "{} is already placed at the requested position.", _0)]
    AlreadyPlaced(NodeId),
    #[fail(display = "{} is not a child of {}.", _0, _1)]
    ChildNotFound(NodeId, NodeId),
}

pub type Result<T> = ::std::result::Result<T, Error>;
