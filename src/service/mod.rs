pub mod generation_service;
