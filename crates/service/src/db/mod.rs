pub mod job_service;
