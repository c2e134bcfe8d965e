//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError`: rejections of the request itself
//! become `Request`, capacity and connectivity problems become `Unavailable`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use wayfarer_core::storage::StoreError;

/// Failures that never reached the service.
fn map_transport_error<E, R>(err: &SdkError<E, R>) -> Option<StoreError> {
    match err {
        SdkError::TimeoutError(_) => Some(StoreError::Unavailable(
            "DynamoDB request timed out".to_string(),
        )),
        SdkError::DispatchFailure(_) => Some(StoreError::Unavailable(
            "Failed to reach DynamoDB".to_string(),
        )),
        SdkError::ResponseError(_) => Some(StoreError::Unavailable(
            "Unreadable response from DynamoDB".to_string(),
        )),
        _ => None,
    }
}

/// Map a GetItem SDK error to StoreError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> StoreError {
    if let Some(transport) = map_transport_error(&err) {
        return transport;
    }

    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => {
            StoreError::Request("Table not found".to_string())
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::Unavailable("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            StoreError::Unavailable("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            StoreError::Unavailable("DynamoDB internal server error".to_string())
        }
        err => StoreError::Request(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a Query SDK error to StoreError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> StoreError {
    if let Some(transport) = map_transport_error(&err) {
        return transport;
    }

    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => {
            StoreError::Request("Table or index not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            StoreError::Unavailable("Throughput exceeded, please retry".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            StoreError::Unavailable("Request limit exceeded, please retry".to_string())
        }
        QueryError::InternalServerError(_) => {
            StoreError::Unavailable("DynamoDB internal server error".to_string())
        }
        err => StoreError::Request(format!("Query failed: {:?}", err)),
    }
}

/// Map a Scan SDK error to StoreError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(err: SdkError<ScanError, R>) -> StoreError {
    if let Some(transport) = map_transport_error(&err) {
        return transport;
    }

    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => {
            StoreError::Request("Table not found".to_string())
        }
        ScanError::ProvisionedThroughputExceededException(_) => {
            StoreError::Unavailable("Throughput exceeded, please retry".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            StoreError::Unavailable("Request limit exceeded, please retry".to_string())
        }
        ScanError::InternalServerError(_) => {
            StoreError::Unavailable("DynamoDB internal server error".to_string())
        }
        err => StoreError::Request(format!("Scan failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StoreError {
    if let Some(transport) = map_transport_error(&err) {
        return transport;
    }

    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            StoreError::Request("Table not found".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::Request("Item collection size limit exceeded".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::Unavailable("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            StoreError::Unavailable("Request limit exceeded, please retry".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            StoreError::Unavailable("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            StoreError::Unavailable("DynamoDB internal server error".to_string())
        }
        err => StoreError::Request(format!("PutItem failed: {:?}", err)),
    }
}
