#[cfg(test)]
mod common;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod gateway_tests;

#[cfg(test)]
mod menu_tests;

#[cfg(test)]
mod ordering_tests;
