/// Fully qualified gRPC method path of the detection call.
pub const SERVE_METHOD_PATH: &str = "/FaceDetectionService/serve";

/// Scheme prepended to bare `host:port` addresses (plaintext HTTP/2).
pub const DEFAULT_SCHEME: &str = "http://";

/// Height in pixels of the score label band drawn above each box.
pub const LABEL_HEIGHT: i32 = 8;

pub const LANDMARK_RADIUS: i32 = 3;

pub const BOX_COLOR: [u8; 3] = [0, 255, 0];
pub const TEXT_COLOR: [u8; 3] = [0, 0, 255];
pub const LANDMARK_COLOR: [u8; 3] = [255, 0, 0];
