pub mod temp_id_repository;
