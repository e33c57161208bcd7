#[cfg(test)]
mod common;



#[cfg(test)]
mod table_property_tests;

#[cfg(test)]
mod table_validation_tests;

#[cfg(test)]
mod navigation_tests;
