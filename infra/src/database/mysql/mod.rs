mod message_repository_impl;

pub use message_repository_impl::MySqlMessageRepository;
