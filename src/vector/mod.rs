//! Vector storage, views and construction.

pub mod builder;
pub mod complex;
pub mod cursor;
pub mod dense;
pub mod element;
pub mod factory;
pub mod layout;
pub mod pool;
pub mod slice;
pub mod traits;

pub use builder::VectorBuilder;
pub use complex::{ComplexArrayVector, ComplexVector, ComplexVectorView, ComplexVectorViewMut};
pub use cursor::{ComplexReadCursor, ComplexWriteCursor, ReadCursor, WriteCursor};
pub use dense::{
    ArrayVector, IntVector, IntVectorView, IntVectorViewMut, LogicalVector, LogicalVectorView,
    LogicalVectorViewMut, LongVector, LongVectorView, LongVectorViewMut, Vector, VectorView,
    VectorViewMut,
};
pub use element::{Element, Integer};
pub use layout::Layout;
pub use pool::VectorPool;
pub use slice::{IndexView, IndexViewMut, Selector};
pub use traits::{
    ComplexGet, ComplexSet, ComplexStrided, ComplexStridedMut, Strided, StridedMut, VectorGet,
    VectorSet,
};
