pub mod a001_pickup_request;
pub mod a002_pickup_slot;
