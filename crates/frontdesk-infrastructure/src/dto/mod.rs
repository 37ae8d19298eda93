//! On-disk representations of domain models.

mod booking;

pub use booking::{BookingDocument, BookingRecordDto, decode_document, encode_document};
