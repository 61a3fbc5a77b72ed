mod temp_id;
mod temp_id_response;
