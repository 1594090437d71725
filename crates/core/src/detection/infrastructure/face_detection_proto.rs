//! Messages and client stub for the `FaceDetectionService` contract in
//! `proto/face_detection.proto`.
//!
//! Written out by hand in the shape `tonic-build` emits so the crate builds
//! without `protoc`. Field tags must stay in sync with the `.proto` file.

use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};

use crate::detection::domain::detection::{
    Detection, MisalignedResponse, NormalizedBox, NormalizedPoint,
};
use crate::shared::constants::SERVE_METHOD_PATH;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FaceDetectionRequest {
    /// Encoded image file contents, passed through untouched.
    #[prost(bytes = "vec", tag = "1")]
    pub image: Vec<u8>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct BoundingBox {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
    #[prost(double, tag = "3")]
    pub width: f64,
    #[prost(double, tag = "4")]
    pub height: f64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Point {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Landmark {
    #[prost(message, repeated, tag = "1")]
    pub point: Vec<Point>,
}

/// Parallel, index-aligned sequences: `bbox[i]`, `score[i]` and
/// `landmark[i]` describe the same face.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FaceDetectionResponse {
    #[prost(message, repeated, tag = "1")]
    pub bbox: Vec<BoundingBox>,
    #[prost(float, repeated, tag = "2")]
    pub score: Vec<f32>,
    #[prost(message, repeated, tag = "3")]
    pub landmark: Vec<Landmark>,
}

impl FaceDetectionResponse {
    /// Converts the wire shape into one `Detection` per face.
    pub fn into_detections(self) -> Result<Vec<Detection>, MisalignedResponse> {
        let boxes = self
            .bbox
            .into_iter()
            .map(|b| NormalizedBox::new(b.x, b.y, b.width, b.height))
            .collect();
        let landmarks = self
            .landmark
            .into_iter()
            .map(|l| {
                l.point
                    .into_iter()
                    .map(|p| NormalizedPoint::new(p.x, p.y))
                    .collect()
            })
            .collect();
        Detection::zip_parallel(boxes, self.score, landmarks)
    }
}

/// Unary client for `FaceDetectionService` over a tonic [`Channel`].
#[derive(Debug, Clone)]
pub struct FaceDetectionServiceClient {
    inner: tonic::client::Grpc<Channel>,
}

impl FaceDetectionServiceClient {
    /// Opens a plaintext HTTP/2 channel to `uri` and waits until it is connected.
    pub async fn connect(uri: String) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(uri)?.connect().await?;
        Ok(Self::new(channel))
    }

    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn serve(
        &mut self,
        request: impl tonic::IntoRequest<FaceDetectionRequest>,
    ) -> Result<tonic::Response<FaceDetectionResponse>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = PathAndQuery::from_static(SERVE_METHOD_PATH);
        self.inner
            .unary(request.into_request(), path, codec)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    fn sample_response() -> FaceDetectionResponse {
        FaceDetectionResponse {
            bbox: vec![BoundingBox {
                x: 0.1,
                y: 0.1,
                width: 0.2,
                height: 0.3,
            }],
            score: vec![0.95],
            landmark: vec![Landmark {
                point: vec![Point { x: 0.15, y: 0.15 }],
            }],
        }
    }

    #[test]
    fn test_into_detections_joins_parallel_fields() {
        let detections = sample_response().into_detections().unwrap();
        assert_eq!(detections.len(), 1);
        let d = &detections[0];
        assert_eq!(d.bbox, NormalizedBox::new(0.1, 0.1, 0.2, 0.3));
        assert_eq!(d.score, 0.95);
        assert_eq!(d.landmarks, vec![NormalizedPoint::new(0.15, 0.15)]);
    }

    #[test]
    fn test_into_detections_empty_response() {
        let detections = FaceDetectionResponse::default().into_detections().unwrap();
        assert!(detections.is_empty());
    }

    #[test]
    fn test_into_detections_rejects_missing_landmarks() {
        let mut response = sample_response();
        response.landmark.clear();
        let err = response.into_detections().unwrap_err();
        assert_eq!(err.boxes, 1);
        assert_eq!(err.scores, 1);
        assert_eq!(err.landmarks, 0);
    }

    #[test]
    fn test_request_encodes_image_as_field_one() {
        let request = FaceDetectionRequest {
            image: vec![0xFF, 0xD8],
        };
        // tag 1, wire type 2 (length-delimited), length 2, payload
        assert_eq!(request.encode_to_vec(), vec![0x0A, 0x02, 0xFF, 0xD8]);
    }

    #[test]
    fn test_response_decodes_packed_scores() {
        // Field 2 (packed float): tag 0x12, length 4, 1.0f32 little-endian.
        let bytes = [0x12, 0x04, 0x00, 0x00, 0x80, 0x3F];
        let response = FaceDetectionResponse::decode(&bytes[..]).unwrap();
        assert_eq!(response.score, vec![1.0]);
        assert!(response.bbox.is_empty());
    }
}
