use thiserror::Error;
use tokio::runtime::{Builder, Runtime};

use crate::detection::domain::detection::{Detection, MisalignedResponse};
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::infrastructure::face_detection_proto::{
    FaceDetectionRequest, FaceDetectionServiceClient,
};
use crate::shared::constants::DEFAULT_SCHEME;

#[derive(Error, Debug)]
pub enum GrpcDetectorError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: tonic::transport::Error,
    },
    #[error("detection call failed: {0}")]
    Rpc(#[from] tonic::Status),
    #[error(transparent)]
    Response(#[from] MisalignedResponse),
}

/// [`FaceDetector`] backed by a remote `FaceDetectionService`.
///
/// Owns a current-thread tokio runtime and drives every call with
/// `block_on`, so callers see a plain blocking API and no worker threads
/// are spawned. The channel lives as long as this value.
pub struct GrpcFaceDetector {
    runtime: Runtime,
    client: FaceDetectionServiceClient,
    endpoint: String,
}

impl GrpcFaceDetector {
    /// Connects to `address` (`host:port` or a full `http://` URI).
    ///
    /// No retry: an unreachable or refusing host fails immediately.
    pub fn connect(address: &str) -> Result<Self, GrpcDetectorError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(GrpcDetectorError::Runtime)?;

        let endpoint = endpoint_uri(address);
        log::info!("Connecting to face detection service at {endpoint}");
        let client = runtime
            .block_on(FaceDetectionServiceClient::connect(endpoint.clone()))
            .map_err(|source| GrpcDetectorError::Connect {
                address: address.to_string(),
                source,
            })?;

        Ok(Self {
            runtime,
            client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one request and blocks until the service answers.
    pub fn serve(&mut self, image: &[u8]) -> Result<Vec<Detection>, GrpcDetectorError> {
        let request = FaceDetectionRequest {
            image: image.to_vec(),
        };
        let response = self
            .runtime
            .block_on(self.client.serve(request))?
            .into_inner();
        Ok(response.into_detections()?)
    }
}

impl FaceDetector for GrpcFaceDetector {
    fn detect(&mut self, image: &[u8]) -> Result<Vec<Detection>, Box<dyn std::error::Error>> {
        Ok(self.serve(image)?)
    }
}

/// Normalizes a user-supplied address into a URI tonic can dial.
///
/// Bare `host:port` gets the plaintext scheme; anything already carrying
/// a scheme is passed through.
pub fn endpoint_uri(address: &str) -> String {
    if address.contains("://") {
        address.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{address}")
    }
}
