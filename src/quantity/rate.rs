//! The quantities carried by one price record: the spot price in both
//! currencies and the exchange rate the feed derived them with.

quantity!(SekPerKilowattHour, "SEK/kWh");
quantity!(EurPerKilowattHour, "€/kWh");
quantity!(SekPerEur, "SEK/€");
