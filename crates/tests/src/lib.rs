
#[cfg(test)]
mod install_tests;



#[cfg(test)]
mod http_transport_tests;
