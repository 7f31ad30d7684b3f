//! GraphQL operation texts sent to the gateway.
//!
//! Kept as plain strings: the backend owns the schema and these are the only
//! shapes this client asks for.

pub const LOGIN: &str = "
  mutation Login($input: LoginInput!) {
    login(input: $input) {
      access_token
      user {
        id
        name
        email
        isAdmin
        createdAt
        updatedAt
      }
    }
  }
";

pub const REGISTER: &str = "
  mutation Register($input: RegisterUserInput!) {
    register(input: $input) {
      access_token
      user {
        id
        name
        email
        isAdmin
        createdAt
        updatedAt
      }
    }
  }
";

pub const GET_PRODUCTS: &str = "
  query GetProducts {
    products {
      id
      name
      category
      stock
      description
      prices {
        size
        value
      }
      images {
        id
        url
      }
    }
  }
";

pub const GET_PRODUCT: &str = "
  query GetProduct($id: String!) {
    product(id: $id) {
      id
      name
      category
      stock
      description
      prices {
        size
        value
      }
      images {
        id
        url
      }
    }
  }
";

pub const USER_BY_EMAIL: &str = "
  query UserByEmail($email: String!) {
    userByEmail(email: $email) {
      id
      name
      email
      isAdmin
      createdAt
      updatedAt
      userDetails {
        id
        address
        city
        pincode
        country
        phone
      }
    }
  }
";

pub const USER_BY_ID: &str = "
  query UserById($userId: String!) {
    userById(id: $userId) {
      id
      name
      email
      isAdmin
      createdAt
      updatedAt
      userDetails {
        id
        address
        city
        pincode
        country
        phone
      }
    }
  }
";

pub const UPDATE_USER_DETAILS: &str = "
  mutation UpdateUserDetails($input: UpdateUserDetailsInput!) {
    updateUserDetails(input: $input) {
      id
      address
      city
      pincode
      country
      phone
    }
  }
";

pub const GET_CART: &str = "
  query GetCart($userId: String!) {
    getCart(userId: $userId) {
      id
      items {
        id
        quantity
        size
        product {
          id
          name
          prices {
            size
            value
          }
          images {
            id
            url
          }
        }
      }
      total
    }
  }
";

pub const ADD_TO_CART: &str = "
  mutation AddToCart($input: AddToCartInput!) {
    addToCart(input: $input) {
      id
      userId
      items {
        id
        quantity
        size
        product {
          id
          name
          prices {
            size
            value
          }
          images {
            id
            url
          }
        }
      }
      total
    }
  }
";

pub const UPDATE_CART_ITEM: &str = "
  mutation UpdateCartItem($userId: String!, $input: UpdateCartItemInput!) {
    updateCartItem(userId: $userId, input: $input) {
      id
      userId
      items {
        id
        quantity
        size
        product {
          id
          name
          prices {
            size
            value
          }
          images {
            id
            url
          }
        }
      }
      total
    }
  }
";

pub const REMOVE_CART_ITEM: &str = "
  mutation RemoveCartItem($userId: String!, $cartItemId: String!) {
    removeCartItem(userId: $userId, cartItemId: $cartItemId) {
      id
      userId
      items {
        id
        quantity
        size
        product {
          id
          name
          prices {
            size
            value
          }
          images {
            id
            url
          }
        }
      }
      total
    }
  }
";
