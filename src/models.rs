use diesel::prelude::{Insertable, Queryable, Selectable};

use crate::schema::meals;
use crate::schema::restaurants;
use crate::schema::rfid_tags;

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Restaurant{
    pub id: i32,
    pub name: String,
    pub image: String,
    pub tag: String
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = restaurants)]
pub struct NewRestaurant{
    pub name: String,
    pub image: String,
    pub tag: String
}

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = rfid_tags)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Rfid{
    pub id: i32,
    pub restaurant_id: i32,
    pub uuid_rfid: String,
    pub label: String
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = rfid_tags)]
pub struct NewRfid{
    pub restaurant_id: i32,
    pub uuid_rfid: String,
    pub label: String
}

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = meals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Meal{
    pub id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub price: i32,
    pub image: String,
    pub description: String
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = meals)]
pub struct NewMeal{
    pub restaurant_id: i32,
    pub name: String,
    pub price: i32,
    pub image: String,
    pub description: String
}
