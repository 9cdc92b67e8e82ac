pub const STAR_COUNT: usize = 5;

/// Filled flags for a star rating. Star `i` (1-indexed) is filled when `rating >= i`.
pub fn rating_stars(rating: f32) -> [bool; STAR_COUNT] {
    std::array::from_fn(|index| rating >= (index + 1) as f32)
}
