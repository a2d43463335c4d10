/*
[INPUT]:  User-supplied credentials
[OUTPUT]: Bearer token values attached to outgoing requests
[POS]:    Auth layer - credential types
[UPDATE]: When adding new credential kinds
*/

pub mod token;

pub use token::AccessToken;
