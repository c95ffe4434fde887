mod bird;
mod feeding;
mod photo;
mod toy;
mod user;
