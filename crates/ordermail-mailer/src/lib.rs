//! # OrderMail Mailer
//! SMTP implementation of the `EmailSender` capability.

pub mod smtp;

pub use smtp::SmtpSender;
