//! Navigation targets.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Vendors,
    Products,
    Categories,
    Sales,
    Settings,
    VendorDetails(u32),
    ProductDetails(u32),
}

/// The main sections shown in the sidebar, in order.
pub const SECTIONS: [Route; 6] = [
    Route::Dashboard,
    Route::Vendors,
    Route::Products,
    Route::Categories,
    Route::Sales,
    Route::Settings,
];

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Vendors => "Vendors",
            Self::Products => "Products",
            Self::Categories => "Categories",
            Self::Sales => "Sales Overview",
            Self::Settings => "Settings",
            Self::VendorDetails(_) => "Vendor Details",
            Self::ProductDetails(_) => "Product Details",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::Dashboard => "Your marketplace at a glance",
            Self::Vendors => "Manage and monitor all vendors in your platform",
            Self::Products => "View and manage all products from your vendors",
            Self::Categories => "Manage product categories used by vendors",
            Self::Sales => "Monitor all sales activity and performance",
            Self::Settings => "Manage your account settings and preferences",
            Self::VendorDetails(_) => "Vendor profile and catalog",
            Self::ProductDetails(_) => "Product information and sales history",
        }
    }

    /// Which sidebar section a route belongs to (details pages highlight
    /// their list page).
    pub fn section(&self) -> Route {
        match self {
            Self::VendorDetails(_) => Self::Vendors,
            Self::ProductDetails(_) => Self::Products,
            other => *other,
        }
    }

    /// Where Esc goes from this route, if anywhere.
    pub fn parent(&self) -> Option<Route> {
        match self {
            Self::VendorDetails(_) => Some(Self::Vendors),
            Self::ProductDetails(_) => Some(Self::Products),
            _ => None,
        }
    }
}
