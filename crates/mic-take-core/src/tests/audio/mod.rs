mod backend;
mod capture;
mod encoder;
