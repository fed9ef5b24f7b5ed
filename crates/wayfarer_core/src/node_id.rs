use crate::define_index_newtype;

// Dense index of a node inside a `GraphStore`. Labels are interned at build time.
define_index_newtype!(NodeId);
