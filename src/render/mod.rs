pub(crate) mod blocks;
pub(crate) mod canvas;
pub(crate) mod compositor;
pub(crate) mod pipeline;
pub(crate) mod sort;
