//! Criterion function library: one pure test function per benchmark family.

mod ackley;
mod ackley2;
mod ackley3;
mod ackley4;
mod adjiman;
mod alpine1;
mod alpine2;
mod bartels;
mod beale;
mod bird;
mod bohachevsky1;
mod bohachevsky2;
mod bohachevsky3;
mod booth;
mod branin;
mod brent;
mod brown;
mod bukin6;
mod colville;
mod crossintray;
mod dejong5;
mod rosenbrock;

pub use ackley::ackley;
pub use ackley2::ackley2;
pub use ackley3::ackley3;
pub use ackley4::ackley4;
pub use adjiman::adjiman;
pub use alpine1::alpine1;
pub use alpine2::alpine2;
pub use bartels::bartels;
pub use beale::beale;
pub use bird::bird;
pub use bohachevsky1::bohachevsky1;
pub use bohachevsky2::bohachevsky2;
pub use bohachevsky3::bohachevsky3;
pub use booth::booth;
pub use branin::branin;
pub use brent::brent;
pub use brown::brown;
pub use bukin6::bukin6;
pub use colville::colville;
pub use crossintray::crossintray;
pub use dejong5::dejong5;
pub use rosenbrock::rosenbrock;
