mod helpers;
mod restaurant;
mod rfid;
