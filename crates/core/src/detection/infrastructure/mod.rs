pub mod face_detection_proto;
pub mod grpc_face_detector;
