// Integration tests organized by client


pub mod test_batch_users;
pub mod test_conference_client;
