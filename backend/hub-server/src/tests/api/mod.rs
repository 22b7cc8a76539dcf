mod account_dto;
mod error;
mod extractors;
