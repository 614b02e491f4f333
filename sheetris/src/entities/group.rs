use crate::entities::Piece;

/// A batch of pieces sharing one material thickness, packed as an independent run.
#[derive(Clone, Debug)]
pub struct ThicknessGroup {
    pub thickness: f64,
    pub pieces: Vec<Piece>,
}

impl ThicknessGroup {
    pub fn new(thickness: f64, pieces: Vec<Piece>) -> Self {
        ThicknessGroup { thickness, pieces }
    }
}
