//! Piece source module - deterministic 7-bag spawn sequence
//!
//! Implements the "7-bag" randomization policy: each bag holds one of every
//! piece kind, shuffled; draws empty the bag and then a new one is shuffled.
//! Every drawn piece also gets a color index, uniform over the piece colors
//! of the active scheme. The sequence is infinite and seeded, so a session
//! replays identically from the same seed.
//!
//! The LCG is kept deliberately simple for determinism in tests.

use blockfall_types::{ColorIndex, PieceKind, PieceSpec};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Infinite piece source: 7-bag kinds plus palette color assignment.
///
/// Holds a one-piece lookahead so the next spawn can be previewed without
/// advancing the RNG.
#[derive(Debug, Clone)]
pub struct PieceSource {
    /// Current bag of piece kinds
    bag: [PieceKind; 7],
    /// Index into current bag
    bag_index: usize,
    rng: SimpleRng,
    /// Number of selectable piece colors (palette size minus background)
    piece_colors: u8,
    /// Pre-drawn next piece, exposed by `peek`
    next: PieceSpec,
}

impl PieceSource {
    /// Create a source with the given seed and color count.
    ///
    /// # Panics
    ///
    /// Panics if `piece_colors` is zero; the active scheme guarantees at
    /// least one piece color.
    pub fn new(seed: u32, piece_colors: u8) -> Self {
        assert!(piece_colors > 0, "piece source needs at least one color");
        let mut source = Self {
            bag: PieceKind::ALL,
            bag_index: 7, // force a refill on the first draw
            rng: SimpleRng::new(seed),
            piece_colors,
            next: PieceSpec {
                kind: PieceKind::I,
                color: 1,
            },
        };
        source.next = source.generate();
        source
    }

    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Draw a fresh spec from the bag, assigning a color in
    /// [1, piece_colors].
    fn generate(&mut self) -> PieceSpec {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        let color = 1 + self.rng.next_range(self.piece_colors as u32) as ColorIndex;
        PieceSpec { kind, color }
    }

    /// Peek at the next piece without advancing the sequence
    pub fn peek(&self) -> PieceSpec {
        self.next
    }

    /// Draw the next piece and advance the lookahead
    pub fn draw(&mut self) -> PieceSpec {
        let current = self.next;
        self.next = self.generate();
        current
    }

    /// Current RNG state (for restarting with a fresh but derived sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}
