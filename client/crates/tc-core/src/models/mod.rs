pub mod temp_id;
pub mod temp_id_response;
