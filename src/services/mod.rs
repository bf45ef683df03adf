pub mod availability_service;
pub mod image_service;
pub mod pricing_service;
pub mod quote_service;
