pub mod csinventoryapi;
