//! Comparative analysis of planned routes against fleet history.

pub mod efficiency;
