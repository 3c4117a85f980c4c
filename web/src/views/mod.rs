mod home;
pub use home::Home;

mod confirmation;
pub use confirmation::ConfirmationView;
