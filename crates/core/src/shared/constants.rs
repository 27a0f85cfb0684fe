/// Cluster label the upstream clustering pipeline assigns to noise.
/// Clusters carrying it are dropped at load time and never shown.
pub const NOISE_CLUSTER_LABEL: i64 = -4;

/// Outline thickness of every face box, in pixels.
///
/// Fixed regardless of image resolution, so boxes look thin on very large
/// photos and heavy on small ones.
pub const BOX_STROKE_WIDTH: u32 = 5;

/// Key prefix of the embedded preview images on a cluster record
/// (`thumbnail_1`, `thumbnail_2`, ...).
pub const THUMBNAIL_KEY_PREFIX: &str = "thumbnail_";

/// Characters stripped from both ends of an operator-supplied directory.
pub const DIRECTORY_TRIM_CHARS: &[char] = &['\'', '"'];
