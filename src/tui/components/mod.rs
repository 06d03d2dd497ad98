pub mod cards;
pub mod form;
pub mod header;
pub mod status;

pub use cards::{CardsContext, DescriptionView, format_posted_date, render_cards, truncate_description};
pub use form::{FORM_HEIGHT, FormContext, render_form};
pub use header::{HEADER_HEIGHT, render_header};
pub use status::{render_footer, render_status};
