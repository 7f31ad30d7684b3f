mod home;
pub use home::Home;

mod products;
pub use products::Products;

mod product_detail;
pub use product_detail::ProductDetail;

mod cart;
pub use cart::CartPage;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod profile;
pub use profile::Profile;
