pub mod marketplace_service;
