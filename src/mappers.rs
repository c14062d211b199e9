pub mod profile_mapper;
