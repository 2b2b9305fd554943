/// Network access
///
/// The only remote service is the public Picsum photo API:
/// - the listing endpoint (one page of photo records)
/// - resized image renditions for the gallery cards
/// - the blurred backdrop of the progress screen

pub mod picsum;

pub use picsum::PicsumClient;
